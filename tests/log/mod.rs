mod global_log_lists_every_commit;
