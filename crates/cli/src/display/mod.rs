pub mod formatter;

pub use formatter::{format_resolution, print_resolution_details};
