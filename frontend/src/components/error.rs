use crate::api::ApiError;
use leptos::*;

/// Bullet points pulled out of a validation error's `details.errors` array.
fn detail_lines(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return vec![];
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|line| line.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn show_code(error: &ApiError) -> bool {
    !error.code.is_empty() && error.code != "UNKNOWN"
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let lines = detail_lines(&e);
                    if !lines.is_empty() {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {lines.into_iter().map(|line| {
                                    view! { <li>{line}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view()
                    } else if show_code(&e) {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_lines_only_apply_to_validation_errors() {
        let validation = ApiError {
            error: "Validation failed".into(),
            code: "VALIDATION_ERROR".into(),
            details: Some(json!({ "errors": ["Title is required"] })),
        };
        assert_eq!(detail_lines(&validation), ["Title is required"]);

        let other = ApiError {
            error: "Nope".into(),
            code: "REQUEST_FAILED".into(),
            details: Some(json!({ "errors": ["ignored"] })),
        };
        assert!(detail_lines(&other).is_empty());
        assert!(show_code(&other));
        assert!(!show_code(&ApiError::unknown("x")));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Title is required", "Description is too long"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Title is required"));
        assert!(html.contains("Description is too long"));
    }

    #[test]
    fn inline_error_renders_code_when_present() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::access_denied()));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Access denied"));
        assert!(html.contains("Code: ACCESS_DENIED"));
    }
}
