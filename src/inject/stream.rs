// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Streaming script injection
//!
//! [`InjectingReader`] wraps a response body and splices a `<script>` element
//! in right after the first occurrence of the anchor. Bytes are produced as
//! the consumer pulls them; the only state carried between reads is how much
//! of the anchor has matched so far, plus the tail of the one chunk in which
//! the anchor completed.

use std::io::{self, Read};

use bytes::{Buf, Bytes};

use super::script::InjectionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Looking for the anchor
    Scanning,
    /// Anchor found, emitting the payload and then the held-back tail
    Injecting,
    /// Forwarding the inner stream untouched
    Passthrough,
}

/// Reader that injects a script after the anchor of an HTML body
///
/// Not restartable: build a new one per response.
pub struct InjectingReader<R> {
    inner: R,
    anchor: Vec<u8>,
    /// KMP prefix table for `anchor`
    prefix: Vec<usize>,
    matched: usize,
    /// Code unit width; matches must end on a multiple of it
    stride: usize,
    /// Bytes scanned so far
    offset: u64,
    payload: Bytes,
    carry: Bytes,
    phase: Phase,
    injected: bool,
}

impl<R: Read> InjectingReader<R> {
    /// Wrap `inner`. An empty context yields an exact passthrough.
    pub fn new(inner: R, ctx: &InjectionContext) -> Self {
        if ctx.is_empty() {
            return Self {
                inner,
                anchor: Vec::new(),
                prefix: Vec::new(),
                matched: 0,
                stride: 1,
                offset: 0,
                payload: Bytes::new(),
                carry: Bytes::new(),
                phase: Phase::Passthrough,
                injected: false,
            };
        }

        let anchor = ctx.anchor_bytes();
        let prefix = prefix_table(&anchor);

        Self {
            inner,
            anchor,
            prefix,
            matched: 0,
            stride: ctx.code_unit_len(),
            offset: 0,
            payload: Bytes::from(ctx.payload_bytes()),
            carry: Bytes::new(),
            phase: Phase::Scanning,
            injected: false,
        }
    }

    /// Check if the anchor was found and the payload spliced in
    pub fn has_injected(&self) -> bool {
        self.injected
    }

    /// Unwrap the inner reader, dropping any pending output
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Feed one byte to the matcher; true when the anchor completes
    ///
    /// A full match that does not end on a code unit boundary is discarded
    /// and matching resumes from the longest overlapping prefix.
    fn advance(&mut self, byte: u8) -> bool {
        self.offset += 1;
        while self.matched > 0 && self.anchor[self.matched] != byte {
            self.matched = self.prefix[self.matched - 1];
        }
        if self.anchor[self.matched] == byte {
            self.matched += 1;
        }
        if self.matched == self.anchor.len() {
            self.matched = self.prefix[self.matched - 1];
            return self.offset % self.stride as u64 == 0;
        }
        false
    }

    /// Position just past the anchor within `chunk`, if it completes there
    fn scan(&mut self, chunk: &[u8]) -> Option<usize> {
        for (i, &byte) in chunk.iter().enumerate() {
            if self.advance(byte) {
                return Some(i + 1);
            }
        }
        None
    }
}

impl<R: Read> Read for InjectingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            match self.phase {
                Phase::Passthrough => return self.inner.read(buf),
                Phase::Injecting => {
                    if let Some(n) = drain(&mut self.payload, buf) {
                        return Ok(n);
                    }
                    if let Some(n) = drain(&mut self.carry, buf) {
                        return Ok(n);
                    }
                    self.phase = Phase::Passthrough;
                }
                Phase::Scanning => {
                    let n = self.inner.read(buf)?;
                    if let Some(end) = self.scan(&buf[..n]) {
                        tracing::trace!(offset = end, "Anchor found, injecting script");
                        self.carry = Bytes::copy_from_slice(&buf[end..n]);
                        self.phase = Phase::Injecting;
                        self.injected = true;
                        return Ok(end);
                    }
                    return Ok(n);
                }
            }
        }
    }
}

/// Copy as much of `src` as fits into `buf`; `None` when `src` is exhausted
fn drain(src: &mut Bytes, buf: &mut [u8]) -> Option<usize> {
    if src.is_empty() {
        return None;
    }
    let n = src.len().min(buf.len());
    buf[..n].copy_from_slice(&src[..n]);
    src.advance(n);
    Some(n)
}

/// Longest proper prefix that is also a suffix, for each prefix of `pattern`
fn prefix_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = table[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        table[i] = k;
    }
    table
}
