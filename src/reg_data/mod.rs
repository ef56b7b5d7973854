pub mod mpu6886;
