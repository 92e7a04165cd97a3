//! Task graph of a compiled query

use super::counters::TezCounters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Engine-specific kind of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    Ddl,
    Tez {
        #[serde(default)]
        llap_mode: bool,
        #[serde(default)]
        counters: Option<TezCounters>,
    },
    MapRed,
    Spark,
    Move,
    Fetch,
    Stats,
    Explain,
    Other,
}

/// A node of the task graph and the tasks that depend on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    pub id: String,
    #[serde(flatten)]
    pub kind: TaskKind,
    #[serde(default)]
    pub dependents: Vec<TaskNode>,
}

impl TaskNode {
    pub fn new(id: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id: id.into(),
            kind,
            dependents: Vec::new(),
        }
    }

    pub fn tez(id: impl Into<String>, llap_mode: bool) -> Self {
        Self::new(
            id,
            TaskKind::Tez {
                llap_mode,
                counters: None,
            },
        )
    }

    pub fn with_dependent(mut self, task: TaskNode) -> Self {
        self.dependents.push(task);
        self
    }

    pub fn with_counters(mut self, counters: TezCounters) -> Self {
        if let TaskKind::Tez { counters: slot, .. } = &mut self.kind {
            *slot = Some(counters);
        }
        self
    }

    pub fn is_ddl(&self) -> bool {
        matches!(self.kind, TaskKind::Ddl)
    }

    pub fn is_tez(&self) -> bool {
        matches!(self.kind, TaskKind::Tez { .. })
    }

    pub fn is_llap(&self) -> bool {
        matches!(self.kind, TaskKind::Tez { llap_mode: true, .. })
    }

    pub fn tez_counters(&self) -> Option<&TezCounters> {
        match &self.kind {
            TaskKind::Tez { counters, .. } => counters.as_ref(),
            _ => None,
        }
    }
}

/// Every task reachable from `roots` that matches `keep`, in visit order
///
/// A task id seen twice is visited once; shared subtrees appear once in the result.
pub fn collect_tasks<'a>(
    roots: Option<&'a [TaskNode]>,
    keep: impl Fn(&TaskNode) -> bool,
) -> Vec<&'a TaskNode> {
    fn walk<'a>(
        tasks: &'a [TaskNode],
        keep: &dyn Fn(&TaskNode) -> bool,
        visited: &mut HashSet<&'a str>,
        found: &mut Vec<&'a TaskNode>,
    ) {
        for task in tasks {
            if !visited.insert(task.id.as_str()) {
                continue;
            }
            if keep(task) {
                found.push(task);
            }
            walk(&task.dependents, keep, visited, found);
        }
    }

    let mut found = Vec::new();
    if let Some(roots) = roots {
        walk(roots, &keep, &mut HashSet::new(), &mut found);
    }
    found
}

pub fn tez_tasks(roots: Option<&[TaskNode]>) -> Vec<&TaskNode> {
    collect_tasks(roots, TaskNode::is_tez)
}

pub fn map_red_tasks(roots: Option<&[TaskNode]>) -> Vec<&TaskNode> {
    collect_tasks(roots, |t| matches!(t.kind, TaskKind::MapRed))
}

pub fn spark_tasks(roots: Option<&[TaskNode]>) -> Vec<&TaskNode> {
    collect_tasks(roots, |t| matches!(t.kind, TaskKind::Spark))
}

/// Look for a DDL task, descending only into the first task that has dependents
///
/// Once a task with dependents is reached, its subtree decides the answer and
/// later siblings are never examined.
pub fn has_ddl_task(tasks: &[TaskNode]) -> bool {
    for task in tasks {
        if task.is_ddl() {
            return true;
        }
        if !task.dependents.is_empty() {
            return has_ddl_task(&task.dependents);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_follows_dependents() {
        let roots = vec![TaskNode::new("stage-1", TaskKind::MapRed)
            .with_dependent(TaskNode::tez("stage-2", false))
            .with_dependent(TaskNode::new("stage-3", TaskKind::Move))];

        let ids: Vec<_> = tez_tasks(Some(roots.as_slice()))
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["stage-2"]);
        assert_eq!(map_red_tasks(Some(roots.as_slice())).len(), 1);
        assert!(spark_tasks(Some(roots.as_slice())).is_empty());
    }

    #[test]
    fn test_collect_visits_shared_task_once() {
        let shared = TaskNode::tez("stage-3", false);
        let roots = vec![
            TaskNode::new("stage-1", TaskKind::Move).with_dependent(shared.clone()),
            TaskNode::new("stage-2", TaskKind::Move).with_dependent(shared),
        ];
        assert_eq!(tez_tasks(Some(roots.as_slice())).len(), 1);
    }

    #[test]
    fn test_collect_without_graph_is_empty() {
        assert!(tez_tasks(None).is_empty());
    }

    #[test]
    fn test_ddl_found_in_first_subtree() {
        let roots = vec![TaskNode::new("stage-0", TaskKind::Move)
            .with_dependent(TaskNode::new("stage-1", TaskKind::Ddl))];
        assert!(has_ddl_task(&roots));
    }

    #[test]
    fn test_ddl_in_later_leaf_sibling_is_found() {
        let roots = vec![
            TaskNode::new("stage-0", TaskKind::Fetch),
            TaskNode::new("stage-1", TaskKind::Ddl),
        ];
        assert!(has_ddl_task(&roots));
    }

    #[test]
    fn test_ddl_after_sibling_with_dependents_is_missed() {
        let roots = vec![
            TaskNode::new("stage-0", TaskKind::Move)
                .with_dependent(TaskNode::new("stage-2", TaskKind::Stats)),
            TaskNode::new("stage-1", TaskKind::Ddl),
        ];
        assert!(!has_ddl_task(&roots));
    }

    #[test]
    fn test_task_json_shape() {
        let task: TaskNode = serde_json::from_str(
            r#"{"id":"Stage-1","kind":"tez","llap_mode":true,
                "dependents":[{"id":"Stage-0","kind":"move"}]}"#,
        )
        .unwrap();
        assert!(task.is_llap());
        assert_eq!(task.dependents.len(), 1);
        assert_eq!(task.dependents[0].kind, TaskKind::Move);
    }
}
