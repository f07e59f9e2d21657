//! Thin wrappers over browser APIs used by the views.
//!
//! Outside the browser (native tests and tooling) these degrade to no-ops
//! that report success, so callers need no platform checks.

use api::Attachment;
use dioxus::prelude::*;

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!("confirm({message}) auto-accepted outside the browser");
        true
    }
}

/// Build the script that copies `text` to the clipboard.
fn clipboard_script(text: &str) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(text)?;
    Ok(format!(
        "await navigator.clipboard.writeText({literal}); return true;"
    ))
}

/// Copy `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let script = clipboard_script(text).map_err(|e| e.to_string())?;
    document::eval(&script)
        .join::<bool>()
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

/// An object URL for previewing a picked file. Revoke it with
/// [`revoke_object_url`] once the preview is gone.
pub fn object_url(attachment: &Attachment) -> Option<String> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&attachment.content_type);
        let blob =
            web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = attachment;
        None
    }
}

pub fn revoke_object_url(url: &str) {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        if web_sys::Url::revoke_object_url(url).is_err() {
            tracing::warn!("failed to revoke object url {url}");
        }
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_script_escapes_text() {
        let script = clipboard_script("say \"hi\"\n</script>").unwrap();
        assert_eq!(
            script,
            r#"await navigator.clipboard.writeText("say \"hi\"\n</script>"); return true;"#
        );
    }

    #[test]
    fn test_native_fallbacks() {
        assert!(confirm("Delete?"));
        assert!(object_url(&Attachment::new("a.png", vec![1, 2, 3])).is_none());
    }
}
