//! Refetch contract: which views a successful mutation makes stale.
//!
//! Nothing is cached, so "invalidate" means a view showing this data must be
//! fetched again. The console re-fetches the view it is currently showing
//! when the mutation lists it; other views pick up the change on their next
//! fetch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Workers,
    Shifts,
    ActiveRecords,
    Records,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateWorker,
    UpdateWorker,
    DeactivateWorker,
    SaveShift,
    DeleteShift,
    ClockIn,
    ClockOut,
    StartBreak,
    EndBreak,
    UploadCsv,
    ImportSheet,
}

impl Mutation {
    pub fn invalidates(self) -> &'static [View] {
        match self {
            Mutation::CreateWorker | Mutation::UpdateWorker | Mutation::DeactivateWorker => {
                &[View::Workers, View::Dashboard]
            }
            Mutation::SaveShift | Mutation::DeleteShift => &[View::Shifts, View::Dashboard],
            Mutation::ClockIn | Mutation::ClockOut => {
                &[View::ActiveRecords, View::Records, View::Dashboard]
            }
            Mutation::StartBreak | Mutation::EndBreak => &[View::ActiveRecords, View::Records],
            Mutation::UploadCsv => &[View::Workers, View::Dashboard],
            Mutation::ImportSheet => &[View::Workers, View::Records, View::Dashboard],
        }
    }

    pub fn refreshes(self, current: View) -> bool {
        self.invalidates().contains(&current)
    }
}
