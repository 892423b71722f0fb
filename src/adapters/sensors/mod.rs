pub mod fixed_position;
