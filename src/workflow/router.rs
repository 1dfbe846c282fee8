//! Smart routing between workflow steps
//!
//! Inspects which optional fields the caller supplied and dispatches to the
//! matching step. All routing state is caller-supplied; nothing is retained
//! between invocations.

use crate::types::Artifact;
use crate::workflow::{
    begin_workflow, generate_pr_content, select_base_branch, WorkflowContext, WorkflowInput,
};

/// Route a smart-entry invocation to the appropriate workflow step
///
/// Decision table, in priority order:
/// 1. base branch + ticket + confirmed=true -> generate content. The
///    generate step always returns a confirmation-seeking artifact; the
///    calling agent is expected to recognize the pre-confirmation and invoke
///    `create_pr_confirmed` immediately with the generated values. This
///    two-hop protocol is deliberate: the router never creates a PR itself.
/// 2. base branch + ticket -> generate content.
/// 3. base branch only -> select base branch.
/// 4. otherwise -> begin workflow. A ticket without a base branch lands
///    here too; base-branch absence dominates.
pub async fn route(ctx: &WorkflowContext<'_>, input: &WorkflowInput) -> Artifact {
    match (&input.base_branch, &input.jira_ticket) {
        (Some(base), Some(ticket)) => {
            generate_pr_content(
                ctx,
                &input.working_dir,
                Some(base),
                Some(ticket),
                input.additional_context.as_deref(),
            )
            .await
        }
        (Some(base), None) => select_base_branch(ctx, &input.working_dir, base).await,
        _ => begin_workflow(ctx, &input.working_dir).await,
    }
}
