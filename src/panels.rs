use crate::constants::{NavLink, NAV_CONTAINER_ID, NAV_HOVER_CLASS, NAV_LINKS, NAV_PANEL_CLASS};
use crate::dom::Listener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn find_or_create_container(document: &web::Document) -> Result<web::Element, JsValue> {
    if let Some(el) = document.get_element_by_id(NAV_CONTAINER_ID) {
        return Ok(el);
    }
    let el = document.create_element("nav")?;
    el.set_id(NAV_CONTAINER_ID);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&el)?;
    Ok(el)
}

fn create_panel(document: &web::Document, link: &NavLink) -> Result<web::Element, JsValue> {
    let a = document.create_element("a")?;
    a.set_class_name(NAV_PANEL_CLASS);
    a.set_attribute("href", link.href)?;
    a.set_text_content(Some(link.label));
    Ok(a)
}

fn panel_elements(container: &web::Element) -> Result<Vec<web::Element>, JsValue> {
    let nodes = container.query_selector_all(&format!(".{}", NAV_PANEL_CLASS))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect())
}

#[inline]
fn set_hovered(el: &web::Element, hovered: bool) {
    let cl = el.class_list();
    if hovered {
        _ = cl.add_1(NAV_HOVER_CLASS);
    } else {
        _ = cl.remove_1(NAV_HOVER_CLASS);
    }
}

/// Ensure both navigation panels exist and make them react to hover.
pub fn mount(document: &web::Document) -> Result<Vec<Listener>, JsValue> {
    let container = find_or_create_container(document)?;
    let existing = panel_elements(&container)?;
    for link in NAV_LINKS.iter().skip(existing.len()) {
        container.append_child(&create_panel(document, link)?)?;
    }

    let mut listeners = Vec::new();
    for el in panel_elements(&container)? {
        let enter = el.clone();
        listeners.push(Listener::new(&el, "mouseenter", move |_ev: web::Event| {
            set_hovered(&enter, true)
        })?);
        let leave = el.clone();
        listeners.push(Listener::new(&el, "mouseleave", move |_ev: web::Event| {
            set_hovered(&leave, false)
        })?);
    }
    log::info!("[panels] {} navigation panels wired", listeners.len() / 2);
    Ok(listeners)
}
