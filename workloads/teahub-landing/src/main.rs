use std::sync::Arc;

use leptos::prelude::*;
use teahub_landing::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let site = Arc::new(teahub_landing::boot());
    leptos::mount::mount_to_body(move || view! { <App site=site.clone()/> });
}
