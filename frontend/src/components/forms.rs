use crate::{
    api::{ApiClient, ApiError},
    components::error::InlineErrorMessage,
    state::auth::{self, use_auth},
    utils::browser,
};
use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginStep {
    Credentials,
    Otp,
}

fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.".to_string());
    }
    if password.is_empty() {
        return Err("Enter your password.".to_string());
    }
    Ok(())
}

fn validate_otp(code: &str) -> Result<(), String> {
    let code = code.trim();
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("The code is 6 digits.".to_string());
    }
    Ok(())
}

/// Two-step sign-in: credentials first, then the one-time code emailed to
/// the user. On success the session is stored and the user lands on their
/// role's home page.
#[component]
pub fn LoginForm() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let (auth, set_auth) = use_auth();

    let (step, set_step) = create_signal(LoginStep::Credentials);
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (otp, set_otp) = create_signal(String::new());
    let (error, set_error) = create_signal::<Option<ApiError>>(None);
    let (notice, set_notice) = create_signal::<Option<String>>(None);

    let request_otp = {
        let client = client.clone();
        create_action(move |credentials: &(String, String)| {
            let client = client.clone();
            let (email, password) = credentials.clone();
            async move { client.request_otp(&email, &password).await }
        })
    };
    let verify_otp = {
        let client = client.clone();
        create_action(move |input: &(String, String)| {
            let client = client.clone();
            let (email, code) = input.clone();
            async move { client.verify_otp(&email, &code).await }
        })
    };
    let pending = Signal::derive(move || {
        request_otp.pending().get() || verify_otp.pending().get()
    });

    create_effect(move |_| {
        if let Some(result) = request_otp.value().get() {
            match result {
                Ok(response) => {
                    set_error.set(None);
                    set_notice.set(Some(response.message));
                    set_step.set(LoginStep::Otp);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });
    create_effect(move |_| {
        if let Some(result) = verify_otp.value().get() {
            match result {
                Ok(response) => {
                    auth::complete_login(set_auth, &response);
                    browser::redirect_to(response.user.role.home_path());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match step.get_untracked() {
            LoginStep::Credentials => {
                if let Err(message) = validate_credentials(
                    &email.get_untracked(),
                    &password.get_untracked(),
                ) {
                    set_error.set(Some(ApiError::validation(message)));
                    return;
                }
                set_error.set(None);
                request_otp.dispatch((email.get_untracked(), password.get_untracked()));
            }
            LoginStep::Otp => {
                if let Err(message) = validate_otp(&otp.get_untracked()) {
                    set_error.set(Some(ApiError::validation(message)));
                    return;
                }
                set_error.set(None);
                verify_otp.dispatch((email.get_untracked(), otp.get_untracked()));
            }
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="w-full max-w-md rounded-lg bg-surface-elevated shadow border border-border p-8 space-y-6">
                <div>
                    <h1 class="text-2xl font-semibold text-fg">"ClassLine"</h1>
                    <p class="text-sm text-fg-muted mt-1">"Sign in to continue"</p>
                </div>
                {move || auth.get().error.clone().map(|message| view! {
                    <p class="text-sm text-status-error-text">{message}</p>
                })}
                <InlineErrorMessage error=error.into() />
                {move || notice.get().map(|message| view! {
                    <p class="text-sm text-status-success-text">{message}</p>
                })}
                <form class="space-y-4" on:submit=on_submit>
                    <Show
                        when=move || step.get() == LoginStep::Credentials
                        fallback=move || view! {
                            <div class="space-y-1">
                                <label class="text-sm font-medium text-fg-muted" for="otp">"One-time code"</label>
                                <input
                                    id="otp"
                                    type="text"
                                    inputmode="numeric"
                                    autocomplete="one-time-code"
                                    class="w-full rounded-md border border-border bg-surface p-2"
                                    prop:value=move || otp.get()
                                    on:input=move |ev| set_otp.set(event_target_value(&ev))
                                />
                            </div>
                        }
                    >
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-fg-muted" for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                class="w-full rounded-md border border-border bg-surface p-2"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-fg-muted" for="password">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                class="w-full rounded-md border border-border bg-surface p-2"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <button
                        type="submit"
                        class="w-full rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || match step.get() {
                            LoginStep::Credentials => "Continue",
                            LoginStep::Otp => "Verify code",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_credentials, validate_otp};

    #[test]
    fn credential_validation_catches_obvious_mistakes() {
        assert!(validate_credentials("ada@classline.dev", "hunter2").is_ok());
        assert!(validate_credentials("", "hunter2").is_err());
        assert!(validate_credentials("not-an-email", "hunter2").is_err());
        assert!(validate_credentials("ada@classline.dev", "").is_err());
    }

    #[test]
    fn otp_must_be_six_digits() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp(" 123456 ").is_ok());
        assert!(validate_otp("12345").is_err());
        assert!(validate_otp("1234567").is_err());
        assert!(validate_otp("12a456").is_err());
    }
}
