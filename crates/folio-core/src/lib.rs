pub mod config;
pub mod constants;
pub mod filters;
pub mod form;
pub mod nav;
pub mod notification;
pub mod particles;
pub mod scroll;
pub mod sections;
pub mod submit;
pub mod timing;
pub mod validate;

pub use config::*;
pub use filters::*;
pub use form::*;
pub use nav::*;
pub use notification::*;
pub use particles::*;
pub use scroll::*;
pub use sections::*;
pub use submit::*;
pub use timing::*;
pub use validate::*;
