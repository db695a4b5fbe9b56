//! HTTP handlers for the link pages and the public redirect.

mod links;
mod redirect;

pub use links::{
    LinkForm, create_link_handler, delete_link_handler, edit_link_handler, home_handler,
    link_info_handler, links_handler, new_link_handler, update_link_handler,
};
pub use redirect::redirect_handler;
