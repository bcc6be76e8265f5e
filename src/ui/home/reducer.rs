use crate::repository::Resource;
use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::LoadStarted => HomeState {
                is_loading: true,
                error_message: None,
                ..state
            },
            HomeIntent::Loaded(Resource::Success(candidatos)) => HomeState {
                is_loading: false,
                error_message: None,
                candidatos,
            },
            HomeIntent::Loaded(Resource::Error { message }) => HomeState {
                is_loading: false,
                error_message: Some(message),
                candidatos: Vec::new(),
            },
            HomeIntent::Loaded(Resource::Loading) => state,
        }
    }
}
