use crate::catalog::report;
use crate::Client;

/// Asynchronous reporting. Obtained from [`Client::report`].
///
/// Reports are produced in two steps: [`task_create`](Self::task_create)
/// queues a task, then [`task_check`](Self::task_check) is polled until the
/// status is `SUCCESS` and a download URL is available.
#[derive(Debug, Clone, Copy)]
pub struct ReportApi<'a> {
    client: &'a Client,
}

impl<'a> ReportApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    group_methods! {
        task_create, task_create_with => report::TaskCreate;
        task_check, task_check_with => report::TaskCheck;
    }
}
