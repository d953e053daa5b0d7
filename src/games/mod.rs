pub mod cricket;
