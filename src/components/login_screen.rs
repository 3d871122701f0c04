use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Session;
use crate::services::{session_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login_success: Callback<Session>,
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_login_success = props.on_login_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let username = username_input.value();
            let password = password_input.value();

            if username.is_empty() || password.is_empty() {
                error.set("Please enter username and password".to_string());
                return;
            }

            error.set(String::new());
            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let on_login_success = on_login_success.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.login(&username, &password).await {
                    Ok(response) => {
                        let session = response.into_session();
                        if let Err(e) = session_service::save(&session) {
                            log::warn!("⚠️ No se pudo persistir la sesión: {}", e);
                        }
                        log::info!("✅ Login exitoso: {}", session.username);
                        on_login_success.emit(session);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        error.set(e.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <div class="login-box">
                <h1>{"Equipment Analytics"}</h1>
                <h2>{"Login"}</h2>

                { if !error.is_empty() {
                    html! { <div class="error-message">{(*error).clone()}</div> }
                } else {
                    html! {}
                } }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter username"
                            ref={username_ref}
                            required=true
                            disabled={*loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter password"
                            ref={password_ref}
                            required=true
                            disabled={*loading}
                        />
                    </div>

                    <button type="submit" disabled={*loading}>
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <div class="switch-link">
                    <span>{"No account yet? "}</span>
                    <button type="button" onclick={props.on_show_register.reform(|_| ())}>
                        {"Register"}
                    </button>
                </div>
            </div>
        </div>
    }
}
