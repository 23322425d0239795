// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed user-visible text for the registration page. The page is served in Persian, so every string here is too.

pub const FILL_ALL_FIELDS: &str = "لطفاً تمام فیلدها را پر کنید.";
pub const ACCEPT_TERMS: &str = "لطفاً شرایط و قوانین استفاده را بپذیرید.";
pub const INVALID_EMAIL: &str = "لطفاً یک آدرس ایمیل معتبر وارد کنید.";
pub const PASSWORD_TOO_SHORT: &str = "رمز عبور باید حداقل ۶ کاراکتر باشد.";
pub const REGISTRATION_SUCCESS: &str = "ثبت نام با موفقیت انجام شد!";
pub const LOGIN_REDIRECT: &str = "در حال انتقال به صفحه ورود...";

/// Markup shown in the account icon while the pointer is over it
pub const SIGN_UP_LABEL_MARKUP: &str = r#"<div class="signup-text"><p>ثبت نام / ورود</p></div>"#;

/// Markup shown in the submit button while a submission is processing
pub const PROCESSING_LABEL_MARKUP: &str = r#"<i class="fa fa-spinner fa-spin"></i> در حال پردازش..."#;
