use crate::{plan::ProjectPlan, steps::StepOutcome};
use colored::Colorize;
use hinagata::{PackageManager, ProjectSpec};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A node in the preview tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Builds the tree for a plan. Directories come first in the plan, so every parent is already
/// linked by the time its children are visited.
fn build_tree(plan: &ProjectPlan, destination: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    let entries = plan
        .directories
        .iter()
        .map(|dir| (dir.as_path(), false))
        .chain(plan.files.iter().map(|file| (file.path.as_path(), true)));

    for (rel_path, is_file) in entries {
        let parent_path = rel_path.parent().unwrap_or_else(|| Path::new(""));

        let Some(parent_node) = lookup.get(parent_path).map(Rc::clone) else {
            log::debug!(
                "parent: {}, not found for path: {}",
                parent_path.display(),
                rel_path.display()
            );
            continue;
        };

        let child_name = rel_path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| rel_path.display().to_string());

        let child = Rc::new(RefCell::new(TreeNode::new(child_name, is_file)));

        parent_node.borrow_mut().children.push(Rc::clone(&child));

        lookup.insert(rel_path.to_path_buf(), child);
    }

    root
}

fn render_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool, out: &mut Vec<String>) {
    let node_borrow = node.borrow();

    let connector = if is_last { "└── " } else { "├── " };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    out.push(format!("{}{}{}", prefix.yellow(), connector.yellow(), name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        render_tree(child, &child_prefix, i == len - 1, out);
    }
}

/// Lines of the ASCII tree for `plan` rooted at `destination`.
pub fn tree_lines(plan: &ProjectPlan, destination: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    render_tree(&build_tree(plan, destination), "", true, &mut lines);

    lines
}

pub fn preview_as_tree(plan: &ProjectPlan, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Creating project".bold().bright_blue(),
    );

    for line in tree_lines(plan, destination) {
        println!("{}", line);
    }

    println!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        format!(
            "{} directories, {} files",
            plan.directories.len(),
            plan.files.len()
        )
        .bright_green()
    );
}

fn report_step(label: &str, outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Skipped => {}
        StepOutcome::Succeeded => println!("{} {}", "done".green(), label),
        StepOutcome::Failed(error) => println!("{} {}: {}", "failed".red(), label, error),
    }
}

/// Follow-up commands shown once scaffolding is finished.
pub fn next_steps(name: &str, manager: PackageManager, installed: bool) -> Vec<String> {
    let mut steps = vec![format!("cd {}", name)];

    if !installed {
        steps.push(format!("{} install", manager));
    }
    steps.push(format!("{} run dev", manager));

    steps
}

pub fn print_summary(spec: &ProjectSpec, git: &StepOutcome, install: &StepOutcome) {
    report_step("git repository initialized", git);
    report_step("dependencies installed", install);

    println!(
        "\n{} {}",
        "✔".green(),
        format!("Project \"{}\" created successfully!", spec.name)
            .bold()
            .green()
    );
    println!("\n{}", "Next steps:".bold());

    for (i, step) in next_steps(&spec.name, spec.package_manager, install.is_success())
        .iter()
        .enumerate()
    {
        println!("  {}. {}", i + 1, step.cyan());
    }
    println!();
}
