//! Navigation side effects. Redirects go through `window.location` in the
//! browser; host builds record the target so gate behavior is observable in
//! tests.

#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == path {
                return;
            }
        }
        let _ = location.set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static LAST_REDIRECT: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    LAST_REDIRECT.with(|target| *target.borrow_mut() = Some(path.to_string()));
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn last_redirect() -> Option<String> {
    LAST_REDIRECT.with(|target| target.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn clear_last_redirect() {
    LAST_REDIRECT.with(|target| *target.borrow_mut() = None);
}
