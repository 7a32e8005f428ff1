mod rm_tracked_file_stages_removal;
