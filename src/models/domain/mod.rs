pub mod module;
pub mod question;
pub mod role;
pub mod statistics;
pub mod submodule;
pub mod user;
pub mod video;
pub use module::Module;
pub use question::Question;
pub use role::Role;
pub use statistics::Statistics;
pub use submodule::Submodule;
pub use user::User;
pub use video::Video;
