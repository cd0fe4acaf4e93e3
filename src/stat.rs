use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub costs: usize,
    pub time_us: usize,
    pub expand_nodes: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Cost {:?} Time(microseconds) {:?} Expanded nodes {:?}",
            self.costs, self.time_us, self.expand_nodes
        );
    }
}
