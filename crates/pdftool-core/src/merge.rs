//! PDF merge
//!
//! Combines multiple documents into one by importing every object from
//! each source under a shifted object-ID range, then appending the source
//! pages to the destination page tree.

use crate::error::PdfToolError;
use lopdf::{Document, Object, ObjectId};

/// Merge documents in the given order into a single PDF.
///
/// A single input is returned unchanged; an empty input is an error.
pub fn merge_documents(documents: Vec<Vec<u8>>) -> Result<Vec<u8>, PdfToolError> {
    if documents.is_empty() {
        return Err(PdfToolError::Operation("Nothing to merge".into()));
    }
    if documents.len() == 1 {
        return Ok(documents.into_iter().next().unwrap());
    }

    let mut sources = Vec::with_capacity(documents.len());
    for (index, bytes) in documents.iter().enumerate() {
        let doc = Document::load_mem(bytes).map_err(|e| {
            PdfToolError::Parse(format!("Document {} failed to load: {}", index + 1, e))
        })?;
        sources.push(doc);
    }

    let mut dest = sources.remove(0);
    let pages_root = pages_root_id(&dest)?;
    let mut kids = page_refs(&dest);
    let mut next_free_id = dest.max_id;

    for source in sources {
        let offset = next_free_id;
        let source_pages = page_refs(&source);
        next_free_id = next_free_id.max(source.max_id + offset);

        for (id, object) in source.objects {
            dest.objects
                .insert((id.0 + offset, id.1), shift_references(object, offset));
        }

        for page in source_pages {
            let page_id = (page.0 + offset, page.1);
            // Re-parent imported pages onto the destination page tree
            if let Some(Object::Dictionary(dict)) = dest.objects.get_mut(&page_id) {
                dict.set("Parent", Object::Reference(pages_root));
            }
            kids.push(page_id);
        }
    }

    dest.max_id = next_free_id;
    set_page_tree_kids(&mut dest, pages_root, kids)?;
    dest.compress();

    let mut out = Vec::new();
    dest.save_to(&mut out)
        .map_err(|e| PdfToolError::Operation(format!("Could not write merged PDF: {}", e)))?;
    Ok(out)
}

/// Page object IDs in document order
fn page_refs(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// Resolve the /Root -> /Pages reference of a document
fn pages_root_id(doc: &Document) -> Result<ObjectId, PdfToolError> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(|root| root.as_reference())
        .map_err(|_| PdfToolError::Parse("Trailer has no catalog reference".into()))?;
    doc.objects
        .get(&catalog_id)
        .and_then(|obj| obj.as_dict().ok())
        .and_then(|dict| dict.get(b"Pages").ok())
        .and_then(|pages| pages.as_reference().ok())
        .ok_or_else(|| PdfToolError::Parse("Catalog has no page tree".into()))
}

/// Rewrite the Kids array and Count of the page tree root
fn set_page_tree_kids(
    doc: &mut Document,
    pages_root: ObjectId,
    kids: Vec<ObjectId>,
) -> Result<(), PdfToolError> {
    let count = kids.len() as i64;
    match doc.objects.get_mut(&pages_root) {
        Some(Object::Dictionary(dict)) => {
            dict.set(
                "Kids",
                Object::Array(kids.into_iter().map(Object::Reference).collect()),
            );
            dict.set("Count", Object::Integer(count));
            Ok(())
        }
        _ => Err(PdfToolError::Operation("Page tree root is not a dictionary".into())),
    }
}

/// Shift every object reference inside `obj` by `offset`
fn shift_references(obj: Object, offset: u32) -> Object {
    match obj {
        Object::Reference((num, gen)) => Object::Reference((num + offset, gen)),
        Object::Array(items) => {
            Object::Array(items.into_iter().map(|o| shift_references(o, offset)).collect())
        }
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = shift_references(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}
