use crate::ui::{
    controls::Position,
    style::{DepthBucket, DEPTH_BUCKETS},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

impl From<&DepthBucket> for LegendEntry {
    fn from(bucket: &DepthBucket) -> Self {
        Self {
            color: bucket.color.to_string(),
            label: bucket.label.to_string(),
        }
    }
}

/// Static color key. Built once and never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub position: Position,
    /// CSS classes of the legend container
    pub class_name: String,
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Depth legend in the bottom-right corner
    pub fn depth() -> Self {
        Self {
            position: Position::BottomRight,
            class_name: "info legend".to_string(),
            entries: DEPTH_BUCKETS.iter().map(LegendEntry::from).collect(),
        }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Inner HTML of the legend container, one swatch row per entry
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "<i style='background: {}'></i>{}<br/>",
                    entry.color, entry.label
                )
            })
            .collect()
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_legend() {
        let legend = Legend::depth();
        assert_eq!(legend.position, Position::BottomRight);
        assert_eq!(legend.entries().len(), 6);
        assert_eq!(legend.entries()[0].color, "#98EE00");
        assert_eq!(legend.entries()[5].label, "90+");
    }

    #[test]
    fn test_legend_html() {
        let html = Legend::depth().to_html();
        assert!(html.starts_with("<i style='background: #98EE00'></i>-10-10<br/>"));
        assert!(html.ends_with("<i style='background: #EA2C2C'></i>90+<br/>"));
        assert_eq!(html.matches("<br/>").count(), 6);
    }
}
