use super::document::{RunOutcome, WorkflowDocument, WorkflowStats, WorkflowSummary};
use super::engine;
use crate::catalog::NodeCatalog;
use crate::error::SyncError;
use crate::graph::{Canvas, validate_canvas};
use crate::demo;
use tracing::debug;

/// The boundary the editor loads and saves workflows through.
///
/// Every call is opaque to the editor: it either succeeds with the shapes
/// below or fails with a [`SyncError`], in which case the caller reports a
/// notification and mutates nothing.
pub trait WorkflowStore {
    /// Workflow summaries, newest first.
    fn list(&self) -> Result<Vec<WorkflowSummary>, SyncError>;

    fn load(&self, id: u64) -> Result<WorkflowDocument, SyncError>;

    /// Creates an empty workflow and returns its id.
    fn create(&mut self, name: &str, description: &str) -> Result<u64, SyncError>;

    /// Replaces the stored document wholesale.
    fn save(
        &mut self,
        id: u64,
        name: &str,
        description: &str,
        canvas: &Canvas,
    ) -> Result<(), SyncError>;

    /// Deletes the workflow and its run history.
    fn delete(&mut self, id: u64) -> Result<(), SyncError>;

    /// Copies a workflow, returning the new id.
    fn duplicate(&mut self, id: u64) -> Result<u64, SyncError>;

    /// Executes the stored (already saved) version of the workflow.
    fn run(&mut self, id: u64) -> Result<RunOutcome, SyncError>;

    /// The most recent run, if any.
    fn last_run(&self, id: u64) -> Result<Option<RunOutcome>, SyncError>;

    /// Kind tag to display label listing, for the palette.
    fn node_kinds(&self) -> Result<Vec<(String, String)>, SyncError>;

    fn stats(&self) -> Result<WorkflowStats, SyncError>;
}

#[derive(Debug, Clone)]
struct StoredWorkflow {
    document: WorkflowDocument,
    runs: Vec<RunOutcome>,
}

/// An in-process [`WorkflowStore`], used by tests and the CLI. Seeded with
/// a small order pipeline so a fresh editor always has something to open.
#[derive(Debug)]
pub struct MemoryStore {
    workflows: Vec<StoredWorkflow>,
    next_id: u64,
    catalog: NodeCatalog,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MemoryStore {
    /// An empty store with the built-in catalog.
    pub fn new() -> Self {
        Self {
            workflows: Vec::new(),
            next_id: 1,
            catalog: NodeCatalog::builtin(),
        }
    }

    /// A store pre-populated with the seed workflow.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let id = store.insert(
            "Flujo ERP de pedidos",
            "Ejemplo base de gestión de pedido: recepción, stock y notificación.",
            demo::seed_canvas(),
        );
        debug!(id, "store seeded");
        store
    }

    fn insert(&mut self, name: &str, description: &str, canvas: Canvas) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.workflows.push(StoredWorkflow {
            document: WorkflowDocument {
                id,
                name: name.to_string(),
                description: description.to_string(),
                canvas,
            },
            runs: Vec::new(),
        });
        id
    }

    fn find(&self, id: u64) -> Result<&StoredWorkflow, SyncError> {
        self.workflows
            .iter()
            .find(|w| w.document.id == id)
            .ok_or(SyncError::WorkflowNotFound(id))
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut StoredWorkflow, SyncError> {
        self.workflows
            .iter_mut()
            .find(|w| w.document.id == id)
            .ok_or(SyncError::WorkflowNotFound(id))
    }
}

impl WorkflowStore for MemoryStore {
    fn list(&self) -> Result<Vec<WorkflowSummary>, SyncError> {
        let mut summaries: Vec<_> = self
            .workflows
            .iter()
            .map(|w| WorkflowSummary {
                id: w.document.id,
                name: w.document.name.clone(),
                description: w.document.description.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(summaries)
    }

    fn load(&self, id: u64) -> Result<WorkflowDocument, SyncError> {
        Ok(self.find(id)?.document.clone())
    }

    fn create(&mut self, name: &str, description: &str) -> Result<u64, SyncError> {
        let name = name.trim();
        let name = if name.is_empty() {
            "Nuevo flujo empresarial"
        } else {
            name
        };
        Ok(self.insert(name, description.trim(), Canvas::new()))
    }

    fn save(
        &mut self,
        id: u64,
        name: &str,
        description: &str,
        canvas: &Canvas,
    ) -> Result<(), SyncError> {
        let clean = validate_canvas(canvas, &self.catalog)?;
        let workflow = self.find_mut(id)?;
        workflow.document.name = name.to_string();
        workflow.document.description = description.to_string();
        workflow.document.canvas = clean;
        debug!(id, "workflow saved");
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<(), SyncError> {
        self.find(id)?;
        self.workflows.retain(|w| w.document.id != id);
        Ok(())
    }

    fn duplicate(&mut self, id: u64) -> Result<u64, SyncError> {
        let source = self.find(id)?.document.clone();
        let name = format!("{} (copia)", source.name);
        Ok(self.insert(&name, &source.description, source.canvas))
    }

    fn run(&mut self, id: u64) -> Result<RunOutcome, SyncError> {
        let canvas = self.find(id)?.document.canvas.clone();
        let outcome = engine::run_canvas(&canvas)?;
        debug!(id, steps = outcome.steps.len(), "workflow run recorded");
        self.find_mut(id)?.runs.push(outcome.clone());
        Ok(outcome)
    }

    fn last_run(&self, id: u64) -> Result<Option<RunOutcome>, SyncError> {
        Ok(self.find(id)?.runs.last().cloned())
    }

    fn node_kinds(&self) -> Result<Vec<(String, String)>, SyncError> {
        Ok(self
            .catalog
            .entries()
            .into_iter()
            .map(|(kind, info)| (kind.to_string(), info.display_name.clone()))
            .collect())
    }

    fn stats(&self) -> Result<WorkflowStats, SyncError> {
        Ok(WorkflowStats {
            total_workflows: self.workflows.len(),
            total_runs: self.workflows.iter().map(|w| w.runs.len()).sum(),
            node_kinds_available: self.catalog.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_lists_newest_first() {
        let mut store = MemoryStore::seeded();
        let second = store.create("Segundo", "").unwrap();
        let list = store.list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, second);
    }

    #[test]
    fn save_validates_through_the_catalog() {
        let mut store = MemoryStore::seeded();
        let mut canvas = store.load(1).unwrap().canvas;
        canvas.nodes[0].kind = "made_up_kind".to_string();
        let err = store.save(1, "X", "", &canvas).unwrap_err();
        assert!(matches!(err, SyncError::Validation(_)));
        // The stored document is untouched by the failed save.
        assert_eq!(store.load(1).unwrap().canvas.nodes[0].kind, "trigger");
    }

    #[test]
    fn runs_accumulate_into_stats() {
        let mut store = MemoryStore::seeded();
        store.run(1).unwrap();
        store.run(1).unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.total_runs, 2);
        assert_eq!(stats.node_kinds_available, 11);
        assert!(store.last_run(1).unwrap().is_some());
    }
}
