pub mod value_object;
