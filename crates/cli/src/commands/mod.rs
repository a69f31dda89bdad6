pub mod detect;
pub mod doctor;
pub mod init;
pub mod select;

pub use detect::detect_command;
pub use doctor::doctor_command;
pub use init::init_command;
pub use select::select_command;
