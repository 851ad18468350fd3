use crate::core::model::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Dashboard,
    Profile,
    Earn,
    WorkList,
    TaskHub,
    /// `from_profile` opens a read-only copy without forwarding to the task hub.
    Contract { from_profile: bool },
    Premium,
}

impl Route {
    pub fn requires_contract(self) -> bool {
        matches!(self, Route::TaskHub | Route::WorkList)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Login => "Login",
            Route::Dashboard => "Home",
            Route::Profile => "Profile",
            Route::Earn => "Earn",
            Route::WorkList => "My work list",
            Route::TaskHub => "Task Hub",
            Route::Contract { .. } => "Contract",
            Route::Premium => "Premium",
        }
    }
}

/// Entry guard: consent-gated screens bounce to the contract until it is accepted.
pub fn guard(route: Route, session: &Session) -> Route {
    if route.requires_contract() && !session.contract_accepted {
        Route::Contract { from_profile: false }
    } else {
        route
    }
}

/// Where the contract screen forwards to on entry, if anywhere.
pub fn contract_entry(accepted: bool, from_profile: bool) -> Option<Route> {
    (accepted && !from_profile).then_some(Route::TaskHub)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_hub_requires_contract() {
        let mut session = Session::default();
        assert_eq!(guard(Route::TaskHub, &session), Route::Contract { from_profile: false });
        assert_eq!(guard(Route::WorkList, &session), Route::Contract { from_profile: false });
        assert_eq!(guard(Route::Earn, &session), Route::Earn);

        session.contract_accepted = true;
        assert_eq!(guard(Route::TaskHub, &session), Route::TaskHub);
    }

    #[test]
    fn review_from_profile_stays_on_contract() {
        assert_eq!(contract_entry(true, false), Some(Route::TaskHub));
        assert_eq!(contract_entry(true, true), None);
        assert_eq!(contract_entry(false, false), None);
    }
}
