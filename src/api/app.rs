use crate::catalog::app;
use crate::Client;

/// Mobile app operations. Obtained from [`Client::app`].
#[derive(Debug, Clone, Copy)]
pub struct AppApi<'a> {
    client: &'a Client,
}

impl<'a> AppApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        /// Register an app for tracking and attribution.
        create, create_with => app::Create;
        info, info_with => app::Info;
        list, list_with => app::List;
        update, update_with => app::Update;
    }
}
