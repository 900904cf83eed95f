use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::SceneError;

/// The drawable scene: a fixed-size surface and the elements painted on it,
/// oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    width: usize,
    height: usize,
    elements: Vec<Element>,
}

impl Document {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Drop every element and keep only `element`
    pub fn replace_all(&mut self, element: impl Into<Element>) {
        self.elements.clear();
        self.elements.push(element.into());
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string(self).map_err(SceneError::Serialize)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(SceneError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Blend, Shape, ShapeKind, Stroke};
    use crate::pixel::Rgba;
    use egui::pos2;

    #[test]
    fn test_json_round_trip() {
        let mut document = Document::new(32, 16);
        document.add_element(Stroke::new(
            vec![pos2(1.0, 2.0), pos2(3.5, 4.0)],
            Rgba::new(255, 0, 0, 128),
            10.0,
            Blend::Paint,
        ));
        document.add_element(Shape::new(
            ShapeKind::Ellipse,
            pos2(0.0, 0.0),
            pos2(8.0, 8.0),
            Rgba::BLACK,
            20.0,
        ));

        let json = document.to_json().unwrap();
        assert!(json.contains(r#""type":"stroke""#));
        assert!(json.contains(r#""kind":"ellipse""#));
        assert_eq!(Document::from_json(&json).unwrap(), document);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Document::from_json("{\"width\": 3"),
            Err(SceneError::Malformed(_))
        ));
    }

    #[test]
    fn test_replace_all() {
        let mut document = Document::new(4, 4);
        document.add_element(Stroke::begin(pos2(1.0, 1.0), Rgba::BLACK, 1.0, Blend::Paint));
        document.add_element(Stroke::begin(pos2(2.0, 2.0), Rgba::BLACK, 1.0, Blend::Erase));
        let line = Shape::new(ShapeKind::Line, pos2(0.0, 0.0), pos2(3.0, 3.0), Rgba::BLACK, 1.0);
        document.replace_all(line);

        assert_eq!(document.elements().len(), 1);
        assert_eq!(document.elements()[0].element_type(), "line");
    }
}
