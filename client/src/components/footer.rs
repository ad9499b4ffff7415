//! Page footer with contact links and the keyboard shortcut table.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::state::shortcuts::SHORTCUTS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <p>"© 2025 " {PROFILE.name} ". All rights reserved."</p>
                <div class="social-links">
                    <a href=format!("mailto:{}", PROFILE.email) title="Email">
                        <i class="fas fa-envelope"></i>
                    </a>
                    <a href=PROFILE.site_url title="Website">
                        <i class="fas fa-globe"></i>
                    </a>
                </div>
                <table class="shortcut-table">
                    <thead>
                        <tr>
                            <th>"Action"</th>
                            <th>"Key"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SHORTCUTS
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.action}</td>
                                        <td><kbd>{row.keys}</kbd></td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </footer>
    }
}
