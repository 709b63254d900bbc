//! Copy for the landing page grids. Rendered in the order given here.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expectation {
    pub icon: &'static str,
    pub title: &'static str,
}

pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: "🏦",
        title: "Banking Infrastructure with Full Control",
        description: "Dedicated accounts with Tier-1 banking partners provide 100% control. No third-party payment agent fees.",
    },
    Benefit {
        icon: "📄",
        title: "Automated Self-Invoicing and Tax Compliance",
        description: "Eliminate manual invoice generation with our system that automatically generates compliant invoices based on campaign data.",
    },
    Benefit {
        icon: "🔄",
        title: "Scalable Integration with Brainlabs' Systems",
        description: "Streamline operations via direct integration into your existing systems for maximum efficiency.",
    },
    Benefit {
        icon: "🌐",
        title: "End-to-End Global Payout Efficiency",
        description: "Leverage local banking in 14 countries to manage funds in over 30 currencies, to over 160 countries.",
    },
    Benefit {
        icon: "📊",
        title: "Simplified Financial Tracking and Reporting",
        description: "Maintain clear audit trails and ensure transparency with comprehensive tracking and reporting tools.",
    },
    Benefit {
        icon: "🔐",
        title: "Vendor Card with Full Control",
        description: "Complete control over prepayments, balance tracking and adjustments with our sophisticated vendor card system.",
    },
];

pub const SOLUTIONS: [Solution; 4] = [
    Solution {
        title: "Banking Made Simple",
        points: &[
            "Local banking capabilities in 14 countries for seamless global operations",
            "Manage funds in over 30 currencies with real-time conversion",
            "Send payments to over 160 countries, leveraging local rails & SWIFT transfers",
            "Real-time balances dashboard for complete financial visibility",
        ],
    },
    Solution {
        title: "Self-Invoicing & Tax Compliance",
        points: &[
            "Automatic invoice generation, linking payouts to campaigns",
            "Complete tax compliance automation for VAT/GST requirements",
            "Simplified regulatory compliance across multiple jurisdictions",
            "Reduced risk of errors with automated document generation",
        ],
    },
    Solution {
        title: "Seamless Connector Integrations",
        points: &[
            "Integrate with over 30 currencies including Creatoriq, Zero and Hubspot",
            "Easy API connections with your existing financial systems",
            "Custom integration capabilities for unique workflow requirements",
            "Continuous updates to maintain compatibility with evolving platforms",
        ],
    },
    Solution {
        title: "Full Financial Transparency",
        points: &[
            "Easy reconciliation by filtering campaign, name or transaction",
            "Create a single vendor profile that tracks all prepayments",
            "Comprehensive reporting for internal and external stakeholders",
            "Clear audit trails for regulatory compliance",
        ],
    },
];

pub const EXPECTATIONS: [Expectation; 5] = [
    Expectation { icon: "⚡", title: "Eliminate Manual Workload" },
    Expectation { icon: "🚀", title: "Faster Predictable Payouts" },
    Expectation { icon: "👁️", title: "Enhanced Transparency" },
    Expectation { icon: "📈", title: "Scalable Solution" },
    Expectation { icon: "🤝", title: "Improved Creator Relations" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_keep_their_sizes() {
        assert_eq!(BENEFITS.len(), 6);
        assert_eq!(SOLUTIONS.len(), 4);
        assert_eq!(EXPECTATIONS.len(), 5);
        assert!(SOLUTIONS.iter().all(|s| s.points.len() == 4));
    }

    #[test]
    fn titles_are_unique_so_order_checks_are_meaningful() {
        let mut titles: Vec<&str> = BENEFITS.iter().map(|b| b.title).collect();
        titles.extend(SOLUTIONS.iter().map(|s| s.title));
        titles.extend(EXPECTATIONS.iter().map(|e| e.title));
        let total = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), total);
    }
}
