use crate::filter::{self, FilterParams};
use crate::models::Record;
use crate::report;
use crate::selection::SkillSelection;
use crate::store::Dataset;
use crate::suggest;

/// Receives every recomputed result list. Rendering the same input twice must
/// produce the same output.
pub trait Renderer {
    fn render(&mut self, matches: &[&Record], total: usize);
}

pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&mut self, matches: &[&Record], total: usize) {
        print!("{}", report::format_cards(matches, total));
    }
}

/// Owns the browsing session: dataset, skill selection, filter parameters and
/// the renderer. Every mutation re-renders the filtered list.
pub struct View<R: Renderer> {
    dataset: Dataset,
    selection: SkillSelection,
    params: FilterParams,
    renderer: R,
}

impl<R: Renderer> View<R> {
    /// Starts with no data; filtering yields nothing until a dataset is installed.
    pub fn new(renderer: R) -> Self {
        Self {
            dataset: Dataset::empty(),
            selection: SkillSelection::new(),
            params: FilterParams::default(),
            renderer,
        }
    }

    /// Starts with filters already chosen; nothing renders until `install`.
    pub fn with_filters(renderer: R, selection: SkillSelection, params: FilterParams) -> Self {
        Self {
            dataset: Dataset::empty(),
            selection,
            params,
            renderer,
        }
    }

    pub fn install(&mut self, dataset: Dataset) -> usize {
        self.dataset = dataset;
        self.recompute()
    }

    pub fn recompute(&mut self) -> usize {
        let matches = filter::apply(self.dataset.records(), &self.selection, &self.params);
        tracing::debug!(
            matched = matches.len(),
            total = self.dataset.len(),
            skills = self.selection.len(),
            "recomputed view"
        );
        self.renderer.render(&matches, self.dataset.len());
        matches.len()
    }

    pub fn reset(&mut self) -> usize {
        self.params = FilterParams::default();
        self.selection.clear();
        self.recompute()
    }

    pub fn add_skill(&mut self, skill: &str) -> usize {
        self.selection.add(skill);
        self.recompute()
    }

    pub fn remove_skill(&mut self, skill: &str) -> usize {
        self.selection.remove(skill);
        self.recompute()
    }

    pub fn set_ug_degree(&mut self, degree: &str) -> usize {
        self.params.ug_degree = degree.to_string();
        self.recompute()
    }

    pub fn set_min_ug_cgpa(&mut self, input: &str) -> usize {
        self.params.min_ug_cgpa = filter::parse_cgpa(input);
        self.recompute()
    }

    pub fn set_min_pg_cgpa(&mut self, input: &str) -> usize {
        self.params.min_pg_cgpa = filter::parse_cgpa(input);
        self.recompute()
    }

    pub fn set_require_pg(&mut self, require_pg: bool) -> usize {
        self.params.require_pg = require_pg;
        self.recompute()
    }

    pub fn set_min_exp(&mut self, input: &str) -> usize {
        self.params.min_exp = filter::parse_min_exp(input);
        self.recompute()
    }

    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        suggest::suggest(query, &self.selection, self.dataset.all_skills())
    }

    pub fn detail(&self, id: u64) -> Option<&Record> {
        self.dataset.find(id)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SkillSelection {
        &self.selection
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
