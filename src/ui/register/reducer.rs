use crate::repository::Resource;
use crate::ui::mvi::Reducer;
use crate::ui::register::intent::RegisterIntent;
use crate::ui::register::state::RegisterState;

pub const REGISTERED_MESSAGE: &str = "Registrado";

pub struct RegisterReducer;

impl Reducer for RegisterReducer {
    type State = RegisterState;
    type Intent = RegisterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RegisterIntent::Submitted | RegisterIntent::DniValidationStarted => RegisterState {
                is_loading: true,
                success_message: None,
                error_message: None,
                ..state
            },
            RegisterIntent::Completed(Resource::Success(())) => RegisterState {
                is_loading: false,
                success_message: Some(REGISTERED_MESSAGE.to_string()),
                error_message: None,
                ..state
            },
            RegisterIntent::Completed(Resource::Error { message }) => RegisterState {
                is_loading: false,
                success_message: None,
                error_message: Some(message),
                ..state
            },
            RegisterIntent::RegionesLoaded(Resource::Success(regiones)) => RegisterState {
                regiones,
                ..state
            },
            RegisterIntent::DniValidated(Resource::Success(validation)) => RegisterState {
                is_loading: false,
                dni_validation: Some(validation),
                ..state
            },
            RegisterIntent::DniValidated(Resource::Error { message }) => RegisterState {
                is_loading: false,
                error_message: Some(message),
                dni_validation: None,
                ..state
            },
            RegisterIntent::ClearDniValidation => RegisterState {
                dni_validation: None,
                ..state
            },
            // Region failures keep whatever list is already loaded.
            RegisterIntent::RegionesLoaded(_)
            | RegisterIntent::Completed(Resource::Loading)
            | RegisterIntent::DniValidated(Resource::Loading) => state,
        }
    }
}
