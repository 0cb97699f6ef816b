//! Build Jobs Component
//!
//! Polls the active build jobs. The poll loop stops on its first failure.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::island::Island;
use super::placeholder::Placeholder;
use crate::api;
use crate::dom;
use crate::models::BuildJob;

pub const JOBS_ID: &str = "listGroupBuilds";
pub const PACKAGES_ID: &str = "listGroupPackages";

type JobsSignal = RwSignal<Option<Vec<BuildJob>>>;

/// At most one poll in flight, so responses land in request order
#[derive(Debug, Default)]
struct PollGate {
    busy: Cell<bool>,
}

impl PollGate {
    /// `false` while an earlier poll is still pending
    fn try_enter(&self) -> bool {
        !self.busy.replace(true)
    }

    fn leave(&self) {
        self.busy.set(false);
    }
}

/// Owns the refresh timer of one job list
#[derive(Clone)]
pub struct JobPoller {
    jobs: JobsSignal,
    island: Island,
    gate: Rc<PollGate>,
    timer: Rc<RefCell<Option<Interval>>>,
}

impl JobPoller {
    pub fn new(jobs: JobsSignal, island: Island) -> Self {
        Self {
            jobs,
            island,
            gate: Rc::new(PollGate::default()),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Fetch now and then every `period_ms`
    pub fn start(&self, period_ms: u32) {
        let poller = self.clone();
        let interval = Interval::new(period_ms, move || poller.poll());
        *self.timer.borrow_mut() = Some(interval);
        self.poll();
    }

    pub fn stop(&self) {
        if let Some(interval) = self.timer.borrow_mut().take() {
            interval.cancel();
            log::info!("job polling stopped");
        }
    }

    fn poll(&self) {
        if !self.gate.try_enter() {
            log::debug!("previous job poll still pending, skipping tick");
            return;
        }
        let poller = self.clone();
        spawn_local(async move {
            let result = api::list_active_jobs().await;
            poller.gate.leave();
            match result {
                Ok(list) => {
                    let jobs = poller.jobs;
                    jobs.set(Some(list));
                    poller.island.mount(move || view! { <JobsList jobs=jobs /> });
                }
                Err(e) => {
                    log::error!("unable to load jobs: {}", e);
                    poller.stop();
                }
            }
        });
    }
}

#[component]
fn JobRow(job: BuildJob) -> impl IntoView {
    let status = job.job_status();
    let badge_class = status.map(|s| s.badge_class()).unwrap_or("badge bg-red-lt");
    let label = status.map(|s| s.label()).unwrap_or("Unknown");
    view! {
        <div class="list-group-item">
            <div class="row align-items-center">
                <div class="col-auto">
                    <code><a href="#">"#" {job.id}</a></code>
                </div>
                <div class="col-auto">
                    <span class="avatar rounded-circle">"S"</span>
                </div>
                <div class="col">
                    <div class="d-flex row">
                        <div>"Some user pushed some build"</div>
                        <div class="text-muted">{format!("{} - {}", job.resource, job.reference)}</div>
                    </div>
                </div>
                <div class="col-auto">
                    <div class=badge_class>{label}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn JobsList(jobs: JobsSignal) -> impl IntoView {
    move || match jobs.get() {
        Some(list) if !list.is_empty() => list
            .into_iter()
            .map(|job| view! { <JobRow job=job /> })
            .collect_view()
            .into_any(),
        _ => view! {
            <Placeholder
                icon="mood-confuzed"
                title="Huh, look at that."
                subtitle="I'd say we've been busy.. clearly we haven't."
            />
        }
        .into_any(),
    }
}

pub fn mount(poll_interval_ms: u32) -> Option<JobPoller> {
    if let Some(anchor) = dom::take_anchor(PACKAGES_ID) {
        mount_to(anchor, || view! {
            <div class="empty">
                <div class="empty-subtitle text-muted">"Erm, no packages to speak of.."</div>
            </div>
        })
        .forget();
    }

    let island = Island::find(JOBS_ID)?;
    let jobs: JobsSignal = RwSignal::new(None);

    let poller = JobPoller::new(jobs, island);
    poller.start(poll_interval_ms);
    Some(poller)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_blocks_overlapping_polls() {
        let gate = PollGate::default();
        assert!(gate.try_enter());
        assert!(!gate.try_enter());
        gate.leave();
        assert!(gate.try_enter());
    }
}
