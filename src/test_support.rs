//! Shared fixtures for unit tests.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// A format-patch style body with the usual mail-client damage: a
/// non-breaking space and a blank line injected inside the hunk.
pub(crate) const CLEAN_BODY: &str = "Fix the build\n\
\n\
Signed-off-by: Dev <dev@example.com>\n\
---\n \
foo.c | 2 +-\n \
1 file changed, 1 insertion(+), 1 deletion(-)\n\
\n\
diff --git a/foo.c b/foo.c\n\
index 1111111..2222222 100644\n\
--- a/foo.c\n\
+++ b/foo.c\n\
@@ -1,3 +1,3 @@\n\
\u{a0}int a;\n\
-int b;\n\
+int c;\n\
\n \
int d;\n\
-- \n\
2.43.0\n";

/// A body whose patch stops before the signature delimiter.
pub(crate) const BROKEN_BODY: &str = "diff --git a/foo.c b/foo.c\n\
@@ -1 +1 @@\n\
-a\n\
+b\n";

/// Build a raw single-part mail message.
pub(crate) fn sample_mail(subject: &str, body: &str) -> Vec<u8> {
    format!(
        "From: Dev <dev@example.com>\r\n\
         Subject: {}\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         Content-Transfer-Encoding: 8bit\r\n\
         \r\n\
         {}",
        subject, body
    )
    .into_bytes()
}

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even when a
        // #[serial] annotation is missing.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}
