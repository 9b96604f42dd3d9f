pub mod channel;

pub use channel::*;

pub fn routes() -> Vec<rocket::Route> {
    rocket::routes![get_channel_info, get_uploads, aggregate, resolve]
}
