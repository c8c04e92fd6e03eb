// This file is part of the product GeoPress.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Generated marketing copy carries inline markdown emphasis markers
//! (`**like this**`). Pages render the HTML form; structured data and meta
//! descriptions need the plain form.

use pulldown_cmark::{Options, Parser, html};

pub fn copy_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}

pub fn copy_plain(text: &str) -> String {
    text.replace("**", "")
}
