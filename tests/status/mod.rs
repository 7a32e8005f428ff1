mod report_deleted_and_modified_files;
mod report_untracked_files;
