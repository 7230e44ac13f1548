//! Statistics block content

/// A value/label pair shown under the feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: "10K+",
        label: "Utilisateurs actifs",
    },
    Stat {
        value: "99.9%",
        label: "Temps de fonctionnement",
    },
    Stat {
        value: "24/7",
        label: "Support client",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_copy() {
        let pairs: Vec<(&str, &str)> = STATS.iter().map(|s| (s.value, s.label)).collect();
        assert_eq!(
            pairs,
            vec![
                ("10K+", "Utilisateurs actifs"),
                ("99.9%", "Temps de fonctionnement"),
                ("24/7", "Support client"),
            ]
        );
    }
}
