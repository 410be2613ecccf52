//! Expandable item conditions.

use super::WaitCondition;
use crate::core::Result;
use crate::handler::ExpandHandler;
use crate::toolkit::Expandable;

/// Fulfilled when `item` is expanded. The result is the item.
#[derive(Debug)]
pub struct ItemIsExpanded<I> {
    handler: ExpandHandler,
    item: I,
    expanded: bool,
}

impl<I: Expandable> ItemIsExpanded<I> {
    #[must_use]
    pub const fn new(handler: ExpandHandler, item: I) -> Self {
        Self {
            handler,
            item,
            expanded: false,
        }
    }
}

impl<I: Expandable> WaitCondition for ItemIsExpanded<I> {
    type Output = I;

    fn test(&mut self) -> Result<bool> {
        self.expanded = self.handler.is_expanded(self.item)?;
        Ok(self.expanded)
    }

    fn description(&self) -> String { format!("{} is expanded", self.item) }

    fn take_result(&mut self) -> Option<Self::Output> { self.expanded.then_some(self.item) }
}
