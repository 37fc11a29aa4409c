use crate::terraform::InstanceTarget;

/// How a gcloud invocation is shaped for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Interactive session on the instance.
    Session,
    /// Instance lifecycle command (stop, start, suspend, resume).
    Lifecycle,
}

/// Static description of one supported action.
#[derive(Debug, Clone, Copy)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub base_command: &'static [&'static str],
    /// Suppress gcloud's interactive confirmation prompt.
    pub quiet: bool,
}

/// The closed set of supported instance actions, in CLI declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceAction {
    Ssh,
    Stop,
    Start,
    Suspend,
    Resume,
}

impl InstanceAction {
    pub const ALL: [InstanceAction; 5] = [
        InstanceAction::Ssh,
        InstanceAction::Stop,
        InstanceAction::Start,
        InstanceAction::Suspend,
        InstanceAction::Resume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InstanceAction::Ssh => "ssh",
            InstanceAction::Stop => "stop",
            InstanceAction::Start => "start",
            InstanceAction::Suspend => "suspend",
            InstanceAction::Resume => "resume",
        }
    }

    pub fn descriptor(&self) -> ActionDescriptor {
        match self {
            InstanceAction::Ssh => ActionDescriptor {
                kind: ActionKind::Session,
                base_command: &["gcloud", "compute", "ssh"],
                quiet: false,
            },
            InstanceAction::Stop => ActionDescriptor {
                kind: ActionKind::Lifecycle,
                base_command: &["gcloud", "compute", "instances", "stop"],
                quiet: true,
            },
            InstanceAction::Start => ActionDescriptor {
                kind: ActionKind::Lifecycle,
                base_command: &["gcloud", "compute", "instances", "start"],
                quiet: true,
            },
            InstanceAction::Suspend => ActionDescriptor {
                kind: ActionKind::Lifecycle,
                base_command: &["gcloud", "compute", "instances", "suspend"],
                quiet: true,
            },
            InstanceAction::Resume => ActionDescriptor {
                kind: ActionKind::Lifecycle,
                base_command: &["gcloud", "compute", "instances", "resume"],
                quiet: true,
            },
        }
    }
}

/// Assemble the full gcloud argument list for an action against a target.
/// Pass-through arguments land last, after `--quiet` for lifecycle actions.
pub fn build_command(
    action: InstanceAction,
    target: &InstanceTarget,
    extra_args: &[String],
) -> Vec<String> {
    let descriptor = action.descriptor();
    let mut args: Vec<String> = descriptor
        .base_command
        .iter()
        .map(|s| s.to_string())
        .collect();

    args.push(target.name.clone());
    args.push("--project".to_string());
    args.push(target.project.clone());
    args.push("--zone".to_string());
    args.push(target.zone.clone());

    match descriptor.kind {
        ActionKind::Session => {}
        ActionKind::Lifecycle => {
            if descriptor.quiet {
                args.push("--quiet".to_string());
            }
        }
    }

    args.extend(extra_args.iter().cloned());
    args
}
