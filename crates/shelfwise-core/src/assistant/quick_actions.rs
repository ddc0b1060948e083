//! Pre-configured quick-action prompts.
//!
//! Quick actions are not a separate code path: each one is a canned
//! prompt fed through the identical `send` pipeline, so a quick action
//! and the same wording typed by hand classify and respond identically.

/// A canned prompt with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Short name used to invoke the action (e.g., a `/sales` slash command).
    pub command: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

/// The fixed set of quick actions, ported from the legacy dashboard.
pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        command: "sales",
        title: "Analyze Sales Trends",
        description: "Get insights on your sales performance",
        prompt: "Analyze my current sales trends and provide recommendations for improvement",
    },
    QuickAction {
        command: "inventory",
        title: "Inventory Optimization",
        description: "Optimize your stock levels",
        prompt: "Help me optimize my inventory levels based on current sales data",
    },
    QuickAction {
        command: "products",
        title: "Product Recommendations",
        description: "Get AI-powered product suggestions",
        prompt: "What products should I consider adding to my inventory based on market trends?",
    },
    QuickAction {
        command: "pricing",
        title: "Pricing Strategy",
        description: "Optimize your pricing strategy",
        prompt: "Analyze my pricing strategy and suggest improvements for better profitability",
    },
];

/// Look up a quick action by its command name.
pub fn find(command: &str) -> Option<&'static QuickAction> {
    QUICK_ACTIONS.iter().find(|a| a.command == command)
}
