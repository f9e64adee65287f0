mod request_id_test;
mod url_redaction_test;
