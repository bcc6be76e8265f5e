use crate::repository::Resource;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::LoginState;
use crate::ui::mvi::Reducer;

pub const WELCOME_MESSAGE: &str = "¡Bienvenido!";

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Submitted => LoginState {
                is_loading: true,
                ..LoginState::default()
            },
            LoginIntent::Completed(Resource::Success(())) => LoginState {
                success_message: Some(WELCOME_MESSAGE.to_string()),
                ..LoginState::default()
            },
            LoginIntent::Completed(Resource::Error { message }) => LoginState {
                error_message: Some(message),
                ..LoginState::default()
            },
            LoginIntent::Completed(Resource::Loading) => state,
        }
    }
}
