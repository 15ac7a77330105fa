use crate::ui::drawer::intent::DrawerIntent;
use crate::ui::drawer::state::DrawerState;
use crate::ui::mvi::Reducer;

pub struct DrawerReducer;

impl Reducer for DrawerReducer {
    type State = DrawerState;
    type Intent = DrawerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DrawerIntent::Open => DrawerState::Open,
            DrawerIntent::Close => DrawerState::Closed,
            DrawerIntent::Toggle => match state {
                DrawerState::Open => DrawerState::Closed,
                DrawerState::Closed => DrawerState::Open,
            },
        }
    }
}
