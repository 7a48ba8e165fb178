// src/api/multipart.rs - Multipart body builder for file-bearing submissions

//! Updates that carry files go out as `POST` with a `_method` override
//! field, matching the server's update-as-POST convention. Optional fields
//! are appended only when present, so an unmodified edit round-trips the
//! entity's current values without clearing anything.

use crate::models::product::Variant;

/// A file picked in the form, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime = guess_mime(&filename).to_string();
        Self {
            filename,
            mime,
            bytes,
        }
    }
}

fn guess_mime(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

enum Part {
    Text { name: String, value: String },
    File { name: String, file: FilePart },
}

pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: format!("----sellerdesk-{}", uuid::Uuid::new_v4().simple()),
            parts: Vec::new(),
        }
    }

    /// Declares update-as-POST semantics for the receiving endpoint.
    pub fn method_override(self, method: &str) -> Self {
        self.text("_method", method)
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Appends the field only when a value is present. Absent fields are
    /// left untouched server-side.
    pub fn maybe_text(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    pub fn file(mut self, name: &str, file: FilePart) -> Self {
        self.parts.push(Part::File {
            name: name.to_string(),
            file,
        });
        self
    }

    pub fn files(mut self, name: &str, files: &[FilePart]) -> Self {
        for file in files {
            self = self.file(name, file.clone());
        }
        self
    }

    /// Serializes variant rows as indexed bracket fields
    /// (`variants[0][price]`, ...), the shape the server's form parser
    /// expects alongside per-variant image files.
    pub fn variants(mut self, variants: &[Variant]) -> Self {
        for (i, variant) in variants.iter().enumerate() {
            let prefix = format!("variants[{}]", i);
            self = self
                .maybe_text(&format!("{}[id]", prefix), variant.id)
                .text(&format!("{}[price]", prefix), variant.price)
                .text(&format!("{}[quantity]", prefix), variant.quantity)
                .maybe_text(&format!("{}[color_id]", prefix), variant.color_id)
                .maybe_text(&format!("{}[size_id]", prefix), variant.size_id)
                .maybe_text(&format!("{}[length]", prefix), variant.dimensions.length)
                .maybe_text(&format!("{}[width]", prefix), variant.dimensions.width)
                .maybe_text(&format!("{}[height]", prefix), variant.dimensions.height)
                .maybe_text(&format!("{}[weight]", prefix), variant.dimensions.weight)
                .text(&format!("{}[is_default]", prefix), variant.is_default as u8)
                .text(
                    &format!("{}[status]", prefix),
                    serde_json::to_value(variant.status)
                        .ok()
                        .and_then(|v| v.as_str().map(str::to_string))
                        .unwrap_or_default(),
                );
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Renders the full body.
    pub fn into_body(self) -> Vec<u8> {
        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            match part {
                Part::Text { name, value } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                            name, value
                        )
                        .as_bytes(),
                    );
                }
                Part::File { name, file } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                            name, file.filename, file.mime
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(&file.bytes);
                    body.extend_from_slice(b"\r\n");
                }
            }
        }
        body.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        body
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_string(form: MultipartForm) -> String {
        String::from_utf8(form.into_body()).unwrap()
    }

    #[test]
    fn test_method_override_field() {
        let form = MultipartForm::new().method_override("PUT").text("name", "Shirt");
        let body = body_string(form);
        assert!(body.contains("name=\"_method\"\r\n\r\nPUT"));
        assert!(body.contains("name=\"name\"\r\n\r\nShirt"));
    }

    #[test]
    fn test_maybe_text_appends_only_if_present() {
        let form = MultipartForm::new()
            .maybe_text("brand_id", Some(4u64))
            .maybe_text("style_id", None::<u64>);
        let body = body_string(form);
        assert!(body.contains("name=\"brand_id\"\r\n\r\n4"));
        assert!(!body.contains("style_id"));
    }

    #[test]
    fn test_file_part_headers_and_bytes() {
        let form = MultipartForm::new().file(
            "images[]",
            FilePart::new("main.png", vec![0x89, 0x50, 0x4e, 0x47]),
        );
        let body = form.into_body();
        let text = String::from_utf8_lossy(&body);
        assert!(text.contains("filename=\"main.png\""));
        assert!(text.contains("Content-Type: image/png"));
        assert!(body
            .windows(4)
            .any(|w| w == [0x89, 0x50, 0x4e, 0x47]));
    }

    #[test]
    fn test_variant_rows_are_indexed() {
        let mut a = Variant::blank();
        a.price = 12.5;
        let mut b = Variant::blank();
        b.price = 14.0;
        b.is_default = true;
        b.color_id = Some(3);

        let body = body_string(MultipartForm::new().variants(&[a, b]));
        assert!(body.contains("name=\"variants[0][price]\"\r\n\r\n12.5"));
        assert!(body.contains("name=\"variants[1][price]\"\r\n\r\n14"));
        assert!(body.contains("name=\"variants[1][is_default]\"\r\n\r\n1"));
        assert!(body.contains("name=\"variants[1][color_id]\"\r\n\r\n3"));
        // No id for fresh rows.
        assert!(!body.contains("variants[0][id]"));
        assert!(body.contains("name=\"variants[1][status]\"\r\n\r\nin_stock"));
    }

    #[test]
    fn test_body_terminates_with_closing_boundary() {
        let form = MultipartForm::new().text("a", "1");
        let boundary = form.boundary.clone();
        let body = body_string(form);
        assert!(body.ends_with(&format!("--{}--\r\n", boundary)));
    }

    #[test]
    fn test_mime_guessing() {
        assert_eq!(FilePart::new("doc.PDF", vec![]).mime, "application/pdf");
        assert_eq!(FilePart::new("photo.jpeg", vec![]).mime, "image/jpeg");
        assert_eq!(FilePart::new("unknown.bin", vec![]).mime, "application/octet-stream");
    }
}
