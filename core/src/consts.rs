/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Cookie carrying the signed session token.
pub const TOKEN_COOKIE: &str = "token";
pub const TOKEN_LIFETIME_DAYS: i64 = 365;

pub const DEFAULT_PAGE: u64 = 1;
pub const MAX_PAGE_SIZE: u64 = 100;
