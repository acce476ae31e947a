mod stage_buckets;
