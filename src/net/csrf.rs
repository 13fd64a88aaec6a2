//! Anti-forgery token lookup from `document.cookie`.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

/// Find cookie `name` in a `document.cookie` style string.
pub fn token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Read cookie `name` from the current document.
#[cfg(feature = "hydrate")]
pub fn read_token(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    token_from_cookies(&cookies, name)
}
