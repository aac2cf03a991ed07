//! Fake engine scripts shared by the integration tests.
//!
//! All scripts are written once, before any test spawns a process, so a
//! concurrently forked child never holds one of them open for writing.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use system_tts_server::{create_router, AppState, Engine, TtsService};
use tempfile::TempDir;

/// espeak-style engine: writes `RIFF|<wpm>|<text>` to the `-w` path.
const ESPEAK_OK: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then echo "fake espeak 1.0"; exit 0; fi
printf 'RIFF|%s|%s' "$2" "$5" > "$4"
"#;

/// Writes partial output, then fails like a bad voice would.
const ESPEAK_FAIL: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then exit 0; fi
printf 'RIFF' > "$4"
echo "unknown voice" >&2
exit 2
"#;

const ESPEAK_SLOW: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then exit 0; fi
exec sleep 10
"#;

const ESPEAK_SILENT: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then exit 0; fi
exit 0
"#;

/// Installed but broken: fails its version check.
const VERSION_FAIL: &str = r#"#!/bin/sh
exit 1
"#;

/// festival-style engine: audio on stdout, text read from `--tts <file>`.
const FESTIVAL_OK: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then echo "fake festival 2.5"; exit 0; fi
printf 'RIFF-festival|'
cat "$2"
"#;

const FESTIVAL_FAIL: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then exit 0; fi
echo "SIOD ERROR: could not open file" >&2
exit 1
"#;

pub struct Fixtures {
    root: TempDir,
}

impl Fixtures {
    pub fn dir(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}

pub fn fixtures() -> &'static Fixtures {
    static FIXTURES: OnceLock<Fixtures> = OnceLock::new();
    FIXTURES.get_or_init(|| {
        let root = tempfile::tempdir().unwrap();
        let layout: &[(&str, &[(&str, &str)])] = &[
            ("espeak-ng", &[("espeak-ng", ESPEAK_OK)]),
            ("espeak-only", &[("espeak", ESPEAK_OK), ("festival", FESTIVAL_OK)]),
            (
                "broken-ng",
                &[
                    ("espeak-ng", VERSION_FAIL),
                    ("espeak", ESPEAK_OK),
                    ("festival", FESTIVAL_OK),
                ],
            ),
            ("festival", &[("festival", FESTIVAL_OK)]),
            ("festival-fail", &[("festival", FESTIVAL_FAIL)]),
            ("all-broken", &[("espeak-ng", VERSION_FAIL), ("festival", VERSION_FAIL)]),
            ("espeak-fail", &[("espeak-ng", ESPEAK_FAIL)]),
            ("espeak-slow", &[("espeak-ng", ESPEAK_SLOW)]),
            ("espeak-silent", &[("espeak-ng", ESPEAK_SILENT)]),
            ("empty", &[]),
        ];

        for (dir, scripts) in layout {
            let dir = root.path().join(dir);
            fs::create_dir_all(&dir).unwrap();
            for (name, body) in *scripts {
                write_script(&dir.join(name), body);
            }
        }

        Fixtures { root }
    })
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

pub fn espeak_ng(dir: &str) -> Engine {
    Engine::Espeak {
        name: "espeak-ng",
        program: fixtures().dir(dir).join("espeak-ng"),
    }
}

pub fn festival(dir: &str) -> Engine {
    Engine::Festival {
        program: fixtures().dir(dir).join("festival"),
    }
}

/// Service writing its temp files into a fresh directory the test can inspect.
pub fn service(engine: Engine) -> (TtsService, TempDir) {
    let scratch = tempfile::tempdir().unwrap();
    let service = TtsService::new(engine).with_temp_dir(scratch.path());
    (service, scratch)
}

pub fn router(service: TtsService) -> axum::Router {
    create_router(Arc::new(AppState { tts: service }))
}

pub fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}
