pub mod paced;
