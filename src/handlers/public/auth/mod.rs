// Public authentication handlers
//
// Account provisioning and token acquisition; nothing here requires a
// credential beyond what the request body carries.

pub mod login; // POST /auth/login - authenticate and get JWT
pub mod register; // POST /auth/register - create new account

pub use login::login_post;
pub use register::register_post;
