//! Stateful PDF session for the merge and split pages
//!
//! Documents live in Rust memory; JavaScript holds only an opaque session
//! handle and wires DOM events to it.

use pdftool_core::{
    document_info, extract_pages, merge_documents, parse_page_ranges, DocumentInfo,
};
use wasm_bindgen::prelude::*;

struct DocumentEntry {
    name: String,
    bytes: Vec<u8>,
    info: DocumentInfo,
}

/// Which tool page owns the session
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Single document, extract selected pages
    Split,
    /// Multiple documents, combine in order
    Merge,
}

#[wasm_bindgen]
pub struct PdfSession {
    mode: SessionMode,
    documents: Vec<DocumentEntry>,
    selected_pages: Vec<u32>,
    progress_callback: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl PdfSession {
    #[wasm_bindgen(constructor)]
    pub fn new(mode: SessionMode) -> Self {
        Self {
            mode,
            documents: Vec::new(),
            selected_pages: Vec::new(),
            progress_callback: None,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[wasm_bindgen(js_name = documentCount)]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Callback signature: (current: number, total: number, message: string) => void
    #[wasm_bindgen(js_name = setProgressCallback)]
    pub fn set_progress_callback(&mut self, callback: js_sys::Function) {
        self.progress_callback = Some(callback);
    }

    /// Add a document; returns its info as a JS object
    #[wasm_bindgen(js_name = addDocument)]
    pub fn add_document(&mut self, name: &str, bytes: &[u8]) -> Result<JsValue, JsValue> {
        let info = self
            .add_document_internal(name, bytes)
            .map_err(|e| JsValue::from_str(&e))?;
        serde_wasm_bindgen::to_value(&info)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = removeDocument)]
    pub fn remove_document(&mut self, index: usize) -> Result<(), JsValue> {
        if index >= self.documents.len() {
            return Err(JsValue::from_str("Document index out of bounds"));
        }
        self.documents.remove(index);
        if self.documents.is_empty() {
            self.selected_pages.clear();
        }
        Ok(())
    }

    /// Reorder documents before a merge; `new_order` lists current indices
    /// in their desired order
    #[wasm_bindgen(js_name = reorderDocuments)]
    pub fn reorder_documents(&mut self, new_order: &[usize]) -> Result<(), JsValue> {
        self.reorder_internal(new_order).map_err(|e| JsValue::from_str(&e))
    }

    /// Set the split page selection from a range string like "1-3, 5"
    #[wasm_bindgen(js_name = setPageSelection)]
    pub fn set_page_selection(&mut self, ranges: &str) -> Result<(), JsValue> {
        if self.mode != SessionMode::Split {
            return Err(JsValue::from_str("Page selection only applies to split mode"));
        }
        self.selected_pages =
            parse_page_ranges(ranges).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Run the session's operation and return the output PDF bytes
    pub fn execute(&self) -> Result<Vec<u8>, JsValue> {
        self.execute_internal().map_err(|e| {
            web_sys::console::error_1(&JsValue::from_str(&e));
            JsValue::from_str(&e)
        })
    }

    fn report_progress(&self, current: u32, total: u32, message: &str) {
        if let Some(callback) = &self.progress_callback {
            let _ = callback.call3(
                &JsValue::NULL,
                &JsValue::from_f64(current as f64),
                &JsValue::from_f64(total as f64),
                &JsValue::from_str(message),
            );
        }
    }
}

// Internal methods keep String errors so they stay testable off-wasm
impl PdfSession {
    fn add_document_internal(&mut self, name: &str, bytes: &[u8]) -> Result<DocumentInfo, String> {
        if self.mode == SessionMode::Split && !self.documents.is_empty() {
            return Err("Split mode takes a single document; remove the current one first".into());
        }

        let info = document_info(bytes).map_err(|e| e.to_string())?;
        if info.encrypted {
            return Err(format!("{} is password-protected", name));
        }

        // Split pages default to the whole document
        if self.mode == SessionMode::Split {
            self.selected_pages = (1..=info.page_count).collect();
        }

        self.documents.push(DocumentEntry {
            name: name.to_string(),
            bytes: bytes.to_vec(),
            info: info.clone(),
        });
        Ok(info)
    }

    fn reorder_internal(&mut self, new_order: &[usize]) -> Result<(), String> {
        if self.mode != SessionMode::Merge {
            return Err("Reorder only applies to merge mode".into());
        }
        if new_order.len() != self.documents.len() {
            return Err("Order must list every document exactly once".into());
        }
        let mut seen = vec![false; self.documents.len()];
        for &index in new_order {
            if index >= self.documents.len() || seen[index] {
                return Err("Order must list every document exactly once".into());
            }
            seen[index] = true;
        }

        let mut entries: Vec<Option<DocumentEntry>> =
            self.documents.drain(..).map(Some).collect();
        self.documents = new_order
            .iter()
            .map(|&index| entries[index].take().expect("indices validated above"))
            .collect();
        Ok(())
    }

    fn execute_internal(&self) -> Result<Vec<u8>, String> {
        match self.mode {
            SessionMode::Merge => {
                if self.documents.len() < 2 {
                    return Err("Merge needs at least two documents".into());
                }
                let total = self.documents.len() as u32;
                for (i, entry) in self.documents.iter().enumerate() {
                    self.report_progress(i as u32, total, &format!("Merging {}", entry.name));
                }
                let inputs: Vec<Vec<u8>> =
                    self.documents.iter().map(|d| d.bytes.clone()).collect();
                let out = merge_documents(inputs).map_err(|e| e.to_string())?;
                self.report_progress(total, total, "Done");
                Ok(out)
            }
            SessionMode::Split => {
                let entry = self
                    .documents
                    .first()
                    .ok_or_else(|| "No document loaded".to_string())?;
                if self.selected_pages.is_empty() {
                    return Err("No pages selected".into());
                }
                self.report_progress(0, 1, &format!("Splitting {}", entry.name));
                let out =
                    extract_pages(&entry.bytes, &self.selected_pages).map_err(|e| e.to_string())?;
                self.report_progress(1, 1, "Done");
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_session_parses_selection() {
        let mut session = PdfSession::new(SessionMode::Split);
        assert!(session.set_page_selection("1-3, 5").is_ok());
        assert_eq!(session.selected_pages, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_merge_needs_two_documents() {
        let session = PdfSession::new(SessionMode::Merge);
        assert!(session.execute_internal().is_err());
    }

    #[test]
    fn test_split_without_document_fails() {
        let session = PdfSession::new(SessionMode::Split);
        assert!(session.execute_internal().is_err());
    }

    #[test]
    fn test_reorder_validates_permutation() {
        let mut session = PdfSession::new(SessionMode::Merge);
        // Empty session: only the empty permutation is valid
        assert!(session.reorder_internal(&[]).is_ok());
        assert!(session.reorder_internal(&[0]).is_err());
    }

    #[test]
    fn test_reorder_rejected_in_split_mode() {
        let mut session = PdfSession::new(SessionMode::Split);
        assert!(session.reorder_internal(&[]).is_err());
    }

    #[test]
    fn test_add_document_rejects_garbage() {
        let mut session = PdfSession::new(SessionMode::Split);
        assert!(session.add_document_internal("x.pdf", b"not a pdf").is_err());
    }
}

// The selection error path returns a JsValue, so this runs under wasm-pack
// test like the smoke tests in lib.rs; JsValue cannot be constructed on native.
#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_selection_rejected_in_merge_mode() {
        let mut session = PdfSession::new(SessionMode::Merge);
        assert!(session.set_page_selection("1").is_err());
    }
}
