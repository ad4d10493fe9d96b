use anyhow::{Context, Result};
use ica_client::{Analysis, AnalysisId, Client, JobStatus, ProjectId};
use log::debug;
use std::collections::HashSet;
use structopt::StructOpt;

use crate::printer::Printer;

#[derive(Debug, StructOpt)]
pub struct JobsArgs {
    #[structopt(name = "status")]
    /// Only show jobs with this status. One of: aborted, running, failed,
    /// requested, succeeded
    pub status: Option<JobStatus>,

    #[structopt(long = "id")]
    /// Show a single job. Any status filter is ignored.
    pub id: Option<AnalysisId>,

    #[structopt(long = "tag")]
    /// Only show jobs with at least one of these tags
    pub tags: Vec<String>,

    #[structopt(long = "max-jobs", default_value = "5000")]
    /// How many jobs to look at, counting those filtered out
    pub max_jobs: usize,
}

pub fn run(args: &JobsArgs, client: &Client, project: &ProjectId, printer: &Printer) -> Result<()> {
    let tags: HashSet<String> = args.tags.iter().cloned().collect();
    let is_tagged = |analysis: &Analysis| tags.is_empty() || analysis.has_any_tag(&tags);

    if let Some(id) = &args.id {
        let analysis = client
            .get_analysis(project, id)
            .with_context(|| format!("Could not get job `{id}`"))?;
        return printer.print_resources(Some(analysis).filter(|analysis| is_tagged(analysis)));
    }

    let mut analyses = client.get_analyses_iter(project, args.status, args.max_jobs);
    for page in analyses.by_ref() {
        let page = page.context("Operation to search jobs has failed.")?;
        printer.print_resources(page.into_iter().filter(|analysis| is_tagged(analysis)))?;
    }
    debug!("Looked at {} jobs", analyses.num_examined());
    Ok(())
}
