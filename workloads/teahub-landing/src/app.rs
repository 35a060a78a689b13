//! Root component and page metadata.

use leptos::prelude::*;
use leptos_meta::*;
use teahub_commerce::schema::{self, Breadcrumb};

use crate::sections::{
    provide_toasts, About, Footer, FloatingContact, Hero, ImageScroll, JsonLd, Navbar, Products,
    Reviews, ScrollProgress, ToastHost,
};
use crate::{SharedSite, Site};

fn breadcrumb_script(site: &Site) -> Option<String> {
    let url = &site.config.brand.site_url;
    let document = schema::breadcrumb_list(&[
        Breadcrumb::new("Home", url.clone()),
        Breadcrumb::new("Our Teas", format!("{}/#flavours", url)),
    ]);
    schema::to_script_body(&document)
        .map_err(|e| log::error!("breadcrumb metadata: {}", e))
        .ok()
}

#[component]
pub fn App(site: SharedSite) -> impl IntoView {
    provide_meta_context();

    let title = site.config.brand.title.clone();
    let description = site.config.brand.description.clone();
    let breadcrumbs = breadcrumb_script(&site);
    provide_context(site);
    provide_toasts();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>

        <main class="page">
            <ScrollProgress/>
            <Navbar/>
            <Hero/>
            <About/>
            <ImageScroll/>
            <Products/>
            <Reviews/>
            <Footer/>
            <FloatingContact/>
            <ToastHost/>
            <JsonLd body=breadcrumbs/>
        </main>
    }
}
