use tracing::{debug, info};

use crate::{DeployStep, StepContext};

/// Ordered list of deploy steps, run one after another.
#[derive(Default)]
pub struct Runner {
    steps: Vec<Box<dyn DeployStep>>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: impl DeployStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Steps carrying at least one of `tags`, in registration order. No tags
    /// selects every step.
    pub fn selected<'s>(&'s self, tags: &'s [String]) -> impl Iterator<Item = &'s dyn DeployStep> {
        self.steps
            .iter()
            .map(|step| step.as_ref())
            .filter(move |step| {
                tags.is_empty()
                    || step
                        .tags()
                        .iter()
                        .any(|tag| tags.iter().any(|wanted| wanted.as_str() == *tag))
            })
    }

    /// Run the selected steps and return their names. The first failing step
    /// ends the run and its error is returned as is.
    pub async fn run(&self, ctx: &StepContext<'_>, tags: &[String]) -> eyre::Result<Vec<String>> {
        let mut completed = vec![];

        for step in self.selected(tags) {
            info!(step = step.name(), network = ctx.network, "running deploy step");
            step.run(ctx).await?;
            completed.push(step.name().to_string());
        }

        debug!(?completed, "deploy run finished");
        Ok(completed)
    }
}
